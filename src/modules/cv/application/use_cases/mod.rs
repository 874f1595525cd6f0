pub mod get_cv_file;
