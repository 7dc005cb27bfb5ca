pub mod add_meal_form;
