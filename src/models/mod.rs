pub mod lenient;
pub mod newsletter;
pub mod post;
pub mod subscriber;

pub use newsletter::Newsletter;
pub use post::Post;
pub use subscriber::Subscriber;
