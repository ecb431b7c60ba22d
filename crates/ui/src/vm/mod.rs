mod tour_vm;

pub use tour_vm::{HotspotVm, NoticeVm, QuizOptionVm, QuizVm, TourVm, map_tour};
