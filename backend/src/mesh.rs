//! Indexed triangle meshes living on the GPU.
//!
//! A [`Mesh`] owns a vertex array object whose vertex buffer holds tightly
//! packed [`Vec3`] positions (attribute 0) and whose element buffer holds
//! `u32` triangle indices. Buffers are written once at construction and never
//! touched again.

use super::glutils::*;
use super::math::Vec3;
use gl::types::*;

#[derive(Debug, Default, Clone, Copy)]
pub struct Mesh {
    vao: u32,
    faces: u32,
}

/// Arguments of the `glDrawElements` call issued by [`Mesh::draw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawElements {
    pub mode: GLenum,
    pub count: GLsizei,
    pub index_type: GLenum,
}

impl Mesh {
    /// Uploads `vertices` and `faces` to freshly generated buffers.
    ///
    /// `faces` is a flat list of index triples into `vertices`.
    pub fn new(vertices: &[Vec3], faces: &[u32]) -> Mesh {
        let mut vao = 0;
        unsafe { gl::GenVertexArrays(1, &mut vao) };
        unsafe { gl::BindVertexArray(vao) };

        // the vbo becomes part of the vao state once the attribute pointer is set
        let mut vbo = 0;
        unsafe { gl::GenBuffers(1, &mut vbo) };
        unsafe { gl::BindBuffer(gl::ARRAY_BUFFER, vbo) };
        gl_buffer_data_arr_stat(vertices);
        gl_vertex_attrib_ptr_enab(0, 3, std::mem::size_of::<Vec3>(), 0);

        let mut ebo = 0;
        unsafe { gl::GenBuffers(1, &mut ebo) };
        unsafe { gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, ebo) };
        gl_buffer_data_element_stat(faces);

        unsafe { gl::BindVertexArray(0) };
        check_gl_err();

        log::debug!(
            "mesh uploaded: vao={} vbo={} ebo={} vertices={} indices={}",
            vao,
            vbo,
            ebo,
            vertices.len(),
            faces.len()
        );

        Mesh {
            vao,
            faces: faces.len() as u32,
        }
    }

    pub fn vao(&self) -> u32 {
        self.vao
    }

    /// Number of indices in the element buffer, three per triangle.
    pub fn faces(&self) -> u32 {
        self.faces
    }

    pub fn draw_call(&self) -> DrawElements {
        DrawElements {
            mode: gl::TRIANGLES,
            count: self.faces as GLsizei,
            index_type: gl::UNSIGNED_INT,
        }
    }

    /// Draws with whatever program and uniforms are currently bound.
    pub fn draw(&self) {
        let call = self.draw_call();
        unsafe { gl::BindVertexArray(self.vao) };
        unsafe {
            gl::DrawElements(
                call.mode,
                call.count,
                call.index_type,
                std::ptr::null(),
            )
        };
        unsafe { gl::BindVertexArray(0) };
    }
}

pub const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(0.5, 0.5, -0.5),   // back upper right
    Vec3::new(-0.5, 0.5, -0.5),  // back upper left
    Vec3::new(-0.5, -0.5, -0.5), // back lower left
    Vec3::new(0.5, -0.5, -0.5),  // back lower right
    Vec3::new(0.5, 0.5, 0.5),    // front upper right
    Vec3::new(-0.5, 0.5, 0.5),   // front upper left
    Vec3::new(-0.5, -0.5, 0.5),  // front lower left
    Vec3::new(0.5, -0.5, 0.5),   // front lower right
];

#[rustfmt::skip]
pub const CUBE_FACES: [u32; 36] = [
    0, 1, 2,
    0, 2, 3,
    4, 0, 3,
    4, 3, 7,
    5, 4, 7,
    5, 7, 6,
    1, 5, 6,
    1, 6, 2,
    4, 5, 1,
    4, 1, 0,
    2, 6, 7,
    2, 7, 3,
];

/// Unit cube centered on the origin.
pub fn cube() -> Mesh {
    Mesh::new(&CUBE_VERTICES, &CUBE_FACES)
}
