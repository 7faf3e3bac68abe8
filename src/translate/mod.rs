pub mod interface;
pub mod client;
pub mod factory;

pub use interface::Translator;
pub use factory::TranslatorFactory;
