pub type ActionList<T> = smallvec::SmallVec<[T; 16]>;

#[macro_export]
macro_rules! action_list {
    () => {
        $crate::smallvec::SmallVec::<[_; 16]>::new()
    };
    ($($e : expr),+ $(,)?) => {
        { let v: $crate::smallvec::SmallVec<[_; 16]> = $crate::smallvec::smallvec![$($e),+]; v }
    }
}

pub type Vector<T> = smallvec::SmallVec<[T; 4]>;

#[macro_export]
macro_rules! vector {
    () => {
        $crate::smallvec::SmallVec::<[_; 4]>::new()
    };
    ($($e : expr),+ $(,)?) => {
        { let v: $crate::smallvec::SmallVec<[_; 4]> = $crate::smallvec::smallvec![$($e),+]; v }
    }
}
