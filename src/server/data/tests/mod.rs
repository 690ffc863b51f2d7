use bgs_test_utils::prelude::*;

use crate::server::query::history::HistoryRequest;


fn window(from_ms: i64, to_ms: i64) -> HistoryRequest {
    HistoryRequest::Window {
        from: factory::at(from_ms),
        to: factory::at(to_ms),
    }
}
