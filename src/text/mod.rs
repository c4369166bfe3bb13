//! String codecs: URL encoding, query strings, CSV, data URIs.

pub mod csv;
pub mod data_uri;
pub mod url;

pub use self::csv::{csv_to_json, json_to_csv};
pub use self::data_uri::{data_uri_to_blob, Blob};
pub use self::url::{encode_url, get_url_params, UrlParam};
