use std::ops::*;

use super::Vec2;

impl<T> Add for Vec2<T>
where
    T: Add<Output = T> + Copy,
{
    type Output = Vec2<T>;
    fn add(self, other: Vec2<T>) -> Vec2<T> {
        Vec2::<T> {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T> Sub for Vec2<T>
where
    T: Sub<Output = T> + Copy,
{
    type Output = Vec2<T>;
    fn sub(self, other: Vec2<T>) -> Vec2<T> {
        Vec2::<T> {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T> Vec2<T>
where
    T: Mul<Output = T> + Copy,
{
    pub fn scale(&self, a: T) -> Vec2<T> {
        Vec2::<T> {
            x: self.x * a,
            y: self.y * a,
        }
    }
}

impl Vec2<f32> {
    pub fn new(x: f32, y: f32) -> Vec2<f32> {
        Vec2::<f32> { x, y }
    }

    pub fn to_p2(self) -> Vec2<i32> {
        Vec2::<i32> {
            x: self.x as i32,
            y: self.y as i32,
        }
    }
}

impl Vec2<i32> {
    pub fn new<A, B>(x: A, y: B) -> Vec2<i32>
    where
        i32: TryFrom<A> + TryFrom<B>,
    {
        Vec2::<i32> {
            x: i32::try_from(x).unwrap_or(0),
            y: i32::try_from(y).unwrap_or(0),
        }
    }
}
