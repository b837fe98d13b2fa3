pub mod waitlist_submission;
