pub mod api_utils;
pub mod http;
pub mod icons;
pub mod input_utils;
pub mod modal;
pub mod money;
pub mod toast;
