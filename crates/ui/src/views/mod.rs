mod state;
mod tour;

pub use state::ViewError;
pub use tour::TourView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
