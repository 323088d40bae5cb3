pub mod models;
pub mod params;
pub mod state;

pub use models::{
    Customer, CustomerUpdate, Entity, NewCustomer, NewUser, User, UserRole, UserUpdate,
};
pub use params::{FetchParams, FilterMap};
pub use state::{Applied, CollectionPage, CollectionState, FetchTicket, MutationMark, Pagination};
