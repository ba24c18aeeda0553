use crate::app::event::MountId;
use crate::app::state::Tab;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    MountView { tab: Tab, mount_id: MountId },
    ViewTripDetails { trip_id: String, destination: String },
    ExploreDestination { suggestion_id: String, destination: String },
    Logout,
    Quit,
}
