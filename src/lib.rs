#![allow(dead_code)]
#![allow(unused_variables)]
#![allow(unused_imports)]

pub mod app_config;
pub mod error;
pub mod time_util;
pub mod weather;
