mod custom_field;
mod enums;
mod sprint;
mod task;
