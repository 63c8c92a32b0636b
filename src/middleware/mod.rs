pub mod request_id;

pub use request_id::{
    make_span_with_request_id, propagate_request_id_layer, request_id_str, set_request_id_layer,
};
