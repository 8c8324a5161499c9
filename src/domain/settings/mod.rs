//! Settings Context - 配置限界上下文
//!
//! 职责:
//! - 部署标识的清洗
//! - 配置项传播规则
//! - overlay 与最终配置的值对象

mod aggregate;
mod errors;
mod identifier;
pub mod keys;
mod overlay;
mod value_objects;

pub use aggregate::{publish, published, Settings};
pub use errors::SettingsError;
pub use identifier::Identifier;
pub use overlay::Overlay;
pub use value_objects::{
    flatten_fields, DatabaseEntry, Databases, HomeCard, LangInfo, Language, UserFieldGroup,
    DEFAULT_DATABASE_ALIAS, DEFAULT_DATABASE_FILE, SQLITE_ENGINE,
};
