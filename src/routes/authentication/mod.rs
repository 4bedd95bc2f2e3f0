mod login;
mod logout;

pub use login::{dismiss_login_error, login, login_form};
pub use logout::logout;
