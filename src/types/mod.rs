pub mod content;
pub mod cv_data;

pub use content::{BlogPost, Profile};
pub use cv_data::{Award, Badge, Certificate, Contact, Cv, Education, Experience, Language};
