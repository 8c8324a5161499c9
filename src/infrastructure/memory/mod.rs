//! Memory Layer - In-Memory State Management
//!
//! 实现 LangInfo 表，保存进程级共享的语言元数据

mod lang_info_table;

pub use lang_info_table::LangInfoTable;
