//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod lang_info;
mod overlay_source;

pub use lang_info::LangInfoPort;
pub use overlay_source::{OverlayError, OverlaySourcePort};
