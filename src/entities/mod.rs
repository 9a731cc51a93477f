pub mod chai_table;
