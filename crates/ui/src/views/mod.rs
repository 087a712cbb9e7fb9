mod portfolio;
mod quiz;
mod state;

pub use portfolio::PortfolioView;
pub use quiz::QuizView;
pub use state::ViewError;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
