use dovetail::{Span, Unit};
use serde::ser::{self, Impossible, Serialize};
use std::io::{Result, Write};

type SerResult<T = ()> = std::result::Result<T, Error>;

macro_rules! write_display {
    ($($method:ident: $ty:ty),+ $(,)?) => {$(
        fn $method(self, v: $ty) -> SerResult {
            write!(self.writer, "{v}").map_err(Error)
        }
    )+};
}

#[derive(Debug)]
pub(super) struct Error(std::io::Error);

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for Error {}

impl ser::Error for Error {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        Self(std::io::Error::other(msg.to_string()))
    }
}

// A simple TOML-like logger for the CLI reports
pub(super) struct Logger<'a, W: Write> {
    writer: &'a mut W,
    unit: Unit,
    precise: bool,
}

impl<'a, W: Write> Logger<'a, W> {
    pub(super) fn new(writer: &'a mut W, unit: Unit) -> Self {
        Self { writer, unit, precise: false }
    }

    // Raw numbers instead of the ruler values
    pub(super) fn precise(self, precise: bool) -> Self {
        Self { precise, ..self }
    }

    pub(super) fn unit(&self) -> Unit {
        self.unit
    }

    pub(super) fn top_title(&mut self, title: &str) -> Result<()> {
        writeln!(self.writer, "[{title}]")
    }

    pub(super) fn title(&mut self, title: &str) -> Result<()> {
        writeln!(self.writer, "\n[{title}]")
    }

    pub(super) fn log<D: std::fmt::Display>(&mut self, key: impl AsRef<str>, v: D) -> Result<()> {
        writeln!(self.writer, "{}={v}", key.as_ref())
    }

    // A record as one `key=value` line per field
    pub(super) fn record<S: Serialize>(&mut self, s: &S) -> Result<()> {
        s.serialize(self).map_err(|e| e.0)
    }

    pub(super) fn len(&mut self, key: impl AsRef<str>, v: f64) -> Result<()> {
        let v = self.fmt_len(v);
        self.log(key, v)
    }

    pub(super) fn lens(&mut self, key: impl AsRef<str>, vs: &[f64]) -> Result<()> {
        let vs = vs.iter().map(|v| self.fmt_len(*v)).collect::<Vec<_>>();
        self.log(key, format_args!("({})", vs.join(", ")))
    }

    pub(super) fn spans(&mut self, spans: &[Span]) -> Result<()> {
        spans
            .iter()
            .enumerate()
            .try_for_each(|(i, span)| self.lens(i.to_string(), span))
    }

    pub(super) fn flush(&mut self) -> Result<()> {
        self.writer.flush()
    }

    fn fmt_len(&self, v: f64) -> String {
        if self.precise {
            format!("{v:.04}")
        } else {
            self.unit.fmt_len(v)
        }
    }
}

impl<'a, 'b, W: Write> ser::Serializer for &'a mut Logger<'b, W> {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = Seq<'a, 'b, W>;
    type SerializeTuple = Seq<'a, 'b, W>;
    type SerializeTupleStruct = Impossible<(), Error>;
    type SerializeTupleVariant = Impossible<(), Error>;
    type SerializeMap = Impossible<(), Error>;
    type SerializeStruct = Self;
    type SerializeStructVariant = Impossible<(), Error>;

    write_display!(
        serialize_bool: bool,
        serialize_i8: i8,
        serialize_i16: i16,
        serialize_i32: i32,
        serialize_i64: i64,
        serialize_u8: u8,
        serialize_u16: u16,
        serialize_u32: u32,
        serialize_u64: u64,
        serialize_char: char,
        serialize_str: &str,
    );

    fn serialize_f32(self, v: f32) -> SerResult {
        self.serialize_f64(v.into())
    }

    fn serialize_f64(self, v: f64) -> SerResult {
        if self.precise {
            write!(self.writer, "{v:.04}").map_err(Error)
        } else {
            write!(self.writer, "{v}").map_err(Error)
        }
    }

    fn serialize_bytes(self, _v: &[u8]) -> SerResult {
        Err(ser::Error::custom("bytes are not loggable"))
    }

    fn serialize_none(self) -> SerResult {
        Ok(())
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> SerResult {
        value.serialize(self)
    }

    fn serialize_unit(self) -> SerResult {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> SerResult {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> SerResult {
        write!(self.writer, "{variant}").map_err(Error)
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> SerResult {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> SerResult {
        Err(ser::Error::custom(format_args!("{name}::{variant} is not loggable")))
    }

    fn serialize_seq(self, _len: Option<usize>) -> SerResult<Self::SerializeSeq> {
        write!(self.writer, "(").map_err(Error)?;
        Ok(Seq { logger: self, first: true })
    }

    fn serialize_tuple(self, len: usize) -> SerResult<Self::SerializeTuple> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> SerResult<Self::SerializeTupleStruct> {
        Err(ser::Error::custom(format_args!("{name} is not loggable")))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> SerResult<Self::SerializeTupleVariant> {
        Err(ser::Error::custom(format_args!("{name}::{variant} is not loggable")))
    }

    fn serialize_map(self, _len: Option<usize>) -> SerResult<Self::SerializeMap> {
        Err(ser::Error::custom("maps are not loggable"))
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> SerResult<Self::SerializeStruct> {
        Ok(self)
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> SerResult<Self::SerializeStructVariant> {
        Err(ser::Error::custom(format_args!("{name}::{variant} is not loggable")))
    }
}

impl<W: Write> ser::SerializeStruct for &mut Logger<'_, W> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, key: &'static str, v: &T) -> SerResult {
        write!(self.writer, "{key}=").map_err(Error)?;
        v.serialize(&mut **self)?;
        writeln!(self.writer).map_err(Error)
    }

    fn end(self) -> SerResult {
        Ok(())
    }
}

// Inline `(a, b)` list
pub(super) struct Seq<'a, 'b, W: Write> {
    logger: &'a mut Logger<'b, W>,
    first: bool,
}

impl<W: Write> ser::SerializeSeq for Seq<'_, '_, W> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, v: &T) -> SerResult {
        if !std::mem::take(&mut self.first) {
            write!(self.logger.writer, ", ").map_err(Error)?;
        }
        v.serialize(&mut *self.logger)
    }

    fn end(self) -> SerResult {
        write!(self.logger.writer, ")").map_err(Error)
    }
}

impl<W: Write> ser::SerializeTuple for Seq<'_, '_, W> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, v: &T) -> SerResult {
        ser::SerializeSeq::serialize_element(self, v)
    }

    fn end(self) -> SerResult {
        ser::SerializeSeq::end(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections() {
        let mut buf = Vec::new();
        {
            let mut logger = Logger::new(&mut buf, Unit::Metric);
            logger.top_title("layout").unwrap();
            logger.log("pin_num", 4).unwrap();
            logger.len("pin_width", 20.83).unwrap();
            logger.title("pins").unwrap();
            logger.spans(&[[0., 0., 12.4, 16.8]]).unwrap();
        }
        let s = String::from_utf8(buf).unwrap();
        assert_eq!(
            s,
            "[layout]\npin_num=4\npin_width=21 mm\n\n[pins]\n0=(0 mm, 0 mm, 12 mm, 17 mm)\n"
        );
    }

    #[test]
    fn precise() {
        let mut buf = Vec::new();
        Logger::new(&mut buf, Unit::Imperial)
            .precise(true)
            .lens("tail_widths", &[33.48214, 43.5])
            .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "tail_widths=(33.4821, 43.5000)\n");
    }

    #[derive(serde::Serialize)]
    struct Entry {
        name: &'static str,
        unit: Unit,
        span: [f64; 2],
        count: Option<usize>,
    }

    #[test]
    fn record() {
        let entry = Entry { name: "tail", unit: Unit::Imperial, span: [0.5, 12.], count: None };
        let mut buf = Vec::new();
        Logger::new(&mut buf, Unit::Metric).record(&entry).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert_eq!(s, "name=tail\nunit=Imperial\nspan=(0.5, 12)\ncount=\n");
        let mut buf = Vec::new();
        Logger::new(&mut buf, Unit::Metric).precise(true).record(&entry.span).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "(0.5000, 12.0000)");
        let map = std::collections::BTreeMap::from([(1, 2)]);
        let mut buf = Vec::new();
        assert!(Logger::new(&mut buf, Unit::Metric).record(&map).is_err());
    }
}
