//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires. The hosting
//! application provides the dependent-entity gateways and the account
//! resolver; this crate ships the REST course store adapter. Every
//! orchestration service receives its ports at construction time.

pub mod accounts;
pub mod gateways;
pub mod store;

pub use accounts::AccountsGateway;
pub use gateways::{
    DeadlineExtensionsGateway, FeedbackSessionsGateway, InstructorsGateway, QuestionsGateway,
    ResponseCommentsGateway, ResponsesGateway, StudentsGateway,
};
pub use store::CourseStore;
