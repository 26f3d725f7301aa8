pub mod region_table;
