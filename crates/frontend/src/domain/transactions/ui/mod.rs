pub mod available_list;
