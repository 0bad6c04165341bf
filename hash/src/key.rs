use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

/// 可以参与hash的key类型。编码是全函数，不存在无法编码的key。
#[derive(Debug, Clone)]
pub enum Key {
    Str(String),
    Int(i64),
    Uint(u64),
    F32(f32),
    F64(f64),
}

impl Key {
    /// 字符串直接取字节；整数编码为十进制文本；浮点编码为最短可还原的科学计数法，
    /// 格式为`<尾数>E<符号><至少两位指数>`，如`1.5E+00`、`-2.5E-07`。
    pub fn encode(&self) -> Cow<'_, [u8]> {
        match self {
            Self::Str(s) => Cow::Borrowed(s.as_bytes()),
            Self::Int(i) => Cow::Owned(i.to_string().into_bytes()),
            Self::Uint(u) => Cow::Owned(u.to_string().into_bytes()),
            Self::F32(f) => {
                let special = float_special(f.is_nan(), f.is_infinite(), f.is_sign_negative());
                Cow::Owned(special.unwrap_or_else(|| scientific(format!("{:E}", f))))
            }
            Self::F64(f) => {
                let special = float_special(f.is_nan(), f.is_infinite(), f.is_sign_negative());
                Cow::Owned(special.unwrap_or_else(|| scientific(format!("{:E}", f))))
            }
        }
    }
}

#[inline]
fn float_special(nan: bool, inf: bool, negative: bool) -> Option<Vec<u8>> {
    match (nan, inf, negative) {
        (true, _, _) => Some(b"NaN".to_vec()),
        (false, true, false) => Some(b"+Inf".to_vec()),
        (false, true, true) => Some(b"-Inf".to_vec()),
        _ => None,
    }
}

// rust的{:E}输出形如"1.5E0"、"1E-7"，补齐指数符号及两位宽度
fn scientific(raw: String) -> Vec<u8> {
    match raw.split_once('E') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{}E{}{:0>2}", mantissa, sign, digits).into_bytes()
        }
        None => raw.into_bytes(),
    }
}

// 同一变体且值相同才相等；浮点按bit比较，所以NaN等于自身，0.0与-0.0不相等
impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Uint(a), Self::Uint(b)) => a == b,
            (Self::F32(a), Self::F32(b)) => a.to_bits() == b.to_bits(),
            (Self::F64(a), Self::F64(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }
}
impl Eq for Key {}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{}", s),
            Self::Int(i) => write!(f, "{}", i),
            Self::Uint(u) => write!(f, "{}", u),
            Self::F32(v) => write!(f, "{}", v),
            Self::F64(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for Key {
    #[inline]
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}
impl From<String> for Key {
    #[inline]
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}
impl From<&String> for Key {
    #[inline]
    fn from(s: &String) -> Self {
        Self::Str(s.clone())
    }
}
impl From<&Key> for Key {
    #[inline]
    fn from(k: &Key) -> Self {
        k.clone()
    }
}

macro_rules! from_num {
    ($variant:ident, $target:ty, $($t:ty),+) => {
        $(
            impl From<$t> for Key {
                #[inline]
                fn from(v: $t) -> Self {
                    Self::$variant(v as $target)
                }
            }
        )+
    };
}
from_num!(Int, i64, i8, i16, i32, i64, isize);
from_num!(Uint, u64, u8, u16, u32, u64, usize);

impl From<f32> for Key {
    #[inline]
    fn from(v: f32) -> Self {
        Self::F32(v)
    }
}
impl From<f64> for Key {
    #[inline]
    fn from(v: f64) -> Self {
        Self::F64(v)
    }
}
