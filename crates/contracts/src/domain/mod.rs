pub mod a001_job_alert_intake;
