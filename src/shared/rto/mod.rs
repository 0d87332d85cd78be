pub mod service_info_rto;
