pub mod duty_record;
