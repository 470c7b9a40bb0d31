pub mod initial_user_creator;
