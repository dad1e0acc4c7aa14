// Resume analysis API: upload → extract → match → gap report.
// All matching goes through skills::build_report; handlers only validate and dispatch.

pub mod handlers;
