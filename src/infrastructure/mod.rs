//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现

pub mod conf;
pub mod host;
pub mod memory;

pub use conf::{base_settings, ConfRegistry};
pub use memory::LangInfoTable;
