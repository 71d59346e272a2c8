pub mod binomial;
pub mod outcome;

pub use binomial::{binomial, ln_binomial};
pub use outcome::{evaluate, loss_probability, win_probability, Engagement, OutcomeProbabilities};
