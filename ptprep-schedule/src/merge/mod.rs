mod entity_counts;
mod feed_id_mapping;
mod merge_error;
mod merge_ops;
mod merge_summary;
mod namespace_ops;
mod prefix_policy;
mod schedule_merger;

pub use entity_counts::EntityCounts;
pub use merge_error::MergeError;
pub use merge_ops::{merge_feeds, FeedInput, MergeOutput};
pub use merge_summary::{FeedSummary, MergeSummary};
pub use namespace_ops::{derive_prefix, NamespaceRegistry};
pub use prefix_policy::PrefixPolicy;
pub use schedule_merger::{FeedMergeOutcome, ScheduleMerger};
