mod get_cv_file_service;

pub use get_cv_file_service::GetCvFileService;
