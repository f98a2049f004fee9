pub mod deepseek;
pub mod openai;
pub mod traits;
pub mod utils;
