mod components;
mod scripts;
mod view;

pub use view::TourView;

#[cfg(test)]
pub(crate) use view::TourTestScript;
