#[cfg(test)]
mod common;


#[cfg(test)]
mod paging_tests;

#[cfg(test)]
mod record_form_tests;

#[cfg(test)]
mod delete_tests;


#[cfg(test)]
mod profile_tests;
