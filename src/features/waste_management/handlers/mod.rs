pub mod waste_management_handler;

pub use waste_management_handler::{
    __path_create_waste_management, __path_delete_waste_management,
    __path_get_waste_management, __path_list_waste_management, __path_update_waste_management,
    create_waste_management, delete_waste_management, get_waste_management,
    list_waste_management, update_waste_management,
};
