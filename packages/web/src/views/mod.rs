mod login;
pub use login::Login;

mod users;
pub use users::Users;

mod customers;
pub use customers::Customers;
