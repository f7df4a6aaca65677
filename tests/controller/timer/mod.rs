mod get_timer_data;
mod timer_list;
mod timer_list_data;

use super::*;
