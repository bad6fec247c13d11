#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use fw_cfg as cfg;
pub use fw_schema as schema;
pub use fw_utils as utils;
