pub mod fixtures;

#[cfg(test)]
mod student_crud_tests;
#[cfg(test)]
mod room_tests;
#[cfg(test)]
mod export_tests;
#[cfg(test)]
mod complaint_tests;
