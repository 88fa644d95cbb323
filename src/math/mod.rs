//! Small fixed-size linear algebra: vectors of 2-4 components and row-major
//! matrices of size 2-4 using the row-vector convention.

pub mod mat2;
pub mod mat3;
pub mod mat4;
pub mod vec2;
pub mod vec3;
pub mod vec4;
