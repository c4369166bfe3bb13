//! koolkit — small, independent helpers.
//!
//! Every helper stands alone: arrays and JSON objects ([`array`], [`value`]),
//! numbers ([`math`]), string codecs ([`text`]), closure wrappers
//! ([`func`]), bounding-box visibility ([`viewport`]) and tokio-based async
//! utilities ([`task`]). The most common entry points are re-exported at the
//! crate root.

pub mod array;
pub mod config;
pub mod error;
pub mod func;
pub mod logger;
pub mod math;
pub mod task;
pub mod text;
pub mod value;
pub mod viewport;

pub use array::{
    array_move, count_occurrences, descartes, group_by, group_by_field, partition, pluck, sort_by,
};
pub use config::KitConfig;
pub use error::KitError;
pub use func::{lazy_get, most_performant, once, pipe, rearg, until, when};
pub use math::{generate_prime_numbers, get_median_value, Easing};
pub use task::{
    async_sequentializer, parallel, pipe_async_functions, poll, record_animation_frames,
    wait_for_time, wait_forever, PollOptions,
};
pub use text::{csv_to_json, data_uri_to_blob, encode_url, get_url_params, json_to_csv, UrlParam};
pub use value::{get_in, get_in_path, get_type_of, is_data_type, DataType};
pub use viewport::{is_visible_in_viewport, Rect, Viewport};
