//! Crate-wide constants: JVM access-flag bits and well-known class names.

// Class/member access and property flags (JVM class-file encoding)
pub const ACC_PUBLIC: u16 = 0x0001;
pub const ACC_PRIVATE: u16 = 0x0002;
pub const ACC_PROTECTED: u16 = 0x0004;
pub const ACC_STATIC: u16 = 0x0008;
pub const ACC_FINAL: u16 = 0x0010;
pub const ACC_INTERFACE: u16 = 0x0200;
pub const ACC_ABSTRACT: u16 = 0x0400;

/// Root of the class hierarchy; also the superclass synthesized for every
/// array type.
pub const ROOT_CLASS: &str = "java.lang.Object";

// Interfaces synthesized for every array type
pub const SERIALIZABLE_CLASS: &str = "java.io.Serializable";
pub const CLONEABLE_CLASS: &str = "java.lang.Cloneable";

/// Internal name given to constructors.
pub const CONSTRUCTOR_NAME: &str = "<init>";
