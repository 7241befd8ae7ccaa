pub mod csv_template;
