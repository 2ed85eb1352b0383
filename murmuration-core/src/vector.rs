use core::fmt::Debug;
use core::ops::{Add, AddAssign, Div, Mul, Sub};

pub(crate) fn sqrt(value: f32) -> f32 {
    #[cfg(feature = "std")]
    {
        value.sqrt()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::sqrtf(value)
    }
}

fn atan2(y: f32, x: f32) -> f32 {
    #[cfg(feature = "std")]
    {
        y.atan2(x)
    }
    #[cfg(not(feature = "std"))]
    {
        libm::atan2f(y, x)
    }
}

/// Point and velocity arithmetic shared by the 2D and 3D simulations.
pub trait Vector:
    Copy
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f32, Output = Self>
    + Div<f32, Output = Self>
    + AddAssign
{
    /// Number of axes.
    const DIM: usize;

    fn zero() -> Self;

    /// Builds a vector from a per-axis generator, axis 0 first.
    fn from_fn<F: FnMut(usize) -> f32>(f: F) -> Self;

    fn component(&self, axis: usize) -> f32;

    fn component_mut(&mut self, axis: usize) -> &mut f32;

    fn dot(&self, other: &Self) -> f32;

    fn magnitude(&self) -> f32 {
        sqrt(self.dot(self))
    }

    fn distance(&self, other: &Self) -> f32 {
        (*self - *other).magnitude()
    }

    /// The unit vector +x, used as the orientation of a vector that has none.
    fn default_heading() -> Self {
        Self::from_fn(|axis| if axis == 0 { 1.0 } else { 0.0 })
    }

    fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            *self / mag
        } else {
            Self::zero()
        }
    }

    /// Direction of travel. A zero vector has no direction and reports
    /// [`Vector::default_heading`] instead.
    fn heading(&self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 && mag.is_finite() {
            *self / mag
        } else {
            Self::default_heading()
        }
    }

    /// Rescales to `max` when longer than `max`, keeping the direction.
    /// The result never exceeds `max`, rounding included.
    fn limit(&self, max: f32) -> Self {
        let mag = self.magnitude();
        if mag > max {
            let mut limited = *self / mag * max;
            while limited.magnitude() > max {
                limited = limited * (1.0 - f32::EPSILON);
            }
            limited
        } else {
            *self
        }
    }

    /// Appends the components, axis 0 first.
    fn extend_into(&self, out: &mut alloc::vec::Vec<f32>) {
        for axis in 0..Self::DIM {
            out.push(self.component(axis));
        }
    }
}

/// A 2D vector used for position and velocity
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
}

impl Vector2D {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Heading angle in radians, 0 for a zero vector.
    pub fn angle(&self) -> f32 {
        if self.x == 0.0 && self.y == 0.0 {
            0.0
        } else {
            atan2(self.y, self.x)
        }
    }
}

impl Vector for Vector2D {
    const DIM: usize = 2;

    fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    fn from_fn<F: FnMut(usize) -> f32>(mut f: F) -> Self {
        let x = f(0);
        let y = f(1);
        Self { x, y }
    }

    fn component(&self, axis: usize) -> f32 {
        match axis {
            0 => self.x,
            1 => self.y,
            _ => panic!("axis {axis} out of range for Vector2D"),
        }
    }

    fn component_mut(&mut self, axis: usize) -> &mut f32 {
        match axis {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("axis {axis} out of range for Vector2D"),
        }
    }

    fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y
    }
}

/// A 3D vector; `z` is depth.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3D {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl Vector for Vector3D {
    const DIM: usize = 3;

    fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    fn from_fn<F: FnMut(usize) -> f32>(mut f: F) -> Self {
        let x = f(0);
        let y = f(1);
        let z = f(2);
        Self { x, y, z }
    }

    fn component(&self, axis: usize) -> f32 {
        match axis {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => panic!("axis {axis} out of range for Vector3D"),
        }
    }

    fn component_mut(&mut self, axis: usize) -> &mut f32 {
        match axis {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("axis {axis} out of range for Vector3D"),
        }
    }

    fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

macro_rules! impl_vector_ops {
    ($name:ident { $($axis:ident),+ }) => {
        impl Add for $name {
            type Output = Self;

            fn add(self, other: Self) -> Self {
                Self { $($axis: self.$axis + other.$axis),+ }
            }
        }

        impl Sub for $name {
            type Output = Self;

            fn sub(self, other: Self) -> Self {
                Self { $($axis: self.$axis - other.$axis),+ }
            }
        }

        impl Mul<f32> for $name {
            type Output = Self;

            fn mul(self, scalar: f32) -> Self {
                Self { $($axis: self.$axis * scalar),+ }
            }
        }

        impl Div<f32> for $name {
            type Output = Self;

            fn div(self, scalar: f32) -> Self {
                Self { $($axis: self.$axis / scalar),+ }
            }
        }

        impl AddAssign for $name {
            fn add_assign(&mut self, other: Self) {
                $(self.$axis += other.$axis;)+
            }
        }
    };
}

impl_vector_ops!(Vector2D { x, y });
impl_vector_ops!(Vector3D { x, y, z });
