/*!
# openni2-sys

Raw bindings to the OpenNI2 C API (`OniCAPI.h`) as a Rust crate. This crate is
used as a base layer in `openni2-rust`.
*/

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]

include!("../bindings/openni2.rs");
