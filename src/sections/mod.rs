//! The page, top to bottom.

mod faq;
mod final_cta;
mod footer;
mod hero;
mod how_it_works;
mod offer;
mod problem;
mod solution;
mod transformation;

pub use faq::Faq;
pub use final_cta::FinalCta;
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use offer::Offer;
pub use problem::Problem;
pub use solution::Solution;
pub use transformation::Transformation;
