use std::mem;
use std::ops::{Index, IndexMut};

/// Three packed floats. Used both as a vertex position uploaded to the GPU
/// and as a `vec3` uniform value, so the layout must stay `#[repr(C)]`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3 { x, y, z }
    }

    #[inline(always)]
    pub fn as_array(&self) -> &[f32; 3] {
        let ary: &[f32; 3] = unsafe { mem::transmute(self) };
        ary
    }

    #[inline(always)]
    pub fn as_array_mut(&mut self) -> &mut [f32; 3] {
        let ary: &mut [f32; 3] = unsafe { mem::transmute(self) };
        ary
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;
    #[inline(always)]
    fn index(&self, i: usize) -> &f32 {
        self.as_array().index(i)
    }
}

impl IndexMut<usize> for Vec3 {
    #[inline(always)]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        self.as_array_mut().index_mut(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec3_is_three_packed_floats() {
        assert_eq!(mem::size_of::<Vec3>(), 3 * mem::size_of::<f32>());
        assert_eq!(mem::align_of::<Vec3>(), mem::align_of::<f32>());
    }

    #[test]
    fn index_follows_field_order() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!((v[0], v[1], v[2]), (1.0, 2.0, 3.0));
        v[2] = -0.5;
        assert_eq!(v.z, -0.5);
        assert_eq!(v.as_array(), &[1.0, 2.0, -0.5]);
    }
}
