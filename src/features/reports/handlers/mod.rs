pub mod report_handler;

pub use report_handler::{
    __path_create_report, __path_get_report, __path_list_reports, create_report, get_report,
    list_reports,
};
