pub mod notice;
pub mod tracker_state;
pub mod work_record;
