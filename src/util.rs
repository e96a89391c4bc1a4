use std::io::BufRead;

use ndarray::{ArrayViewMut1, ArrayViewMut2};

use crate::error::{Error, Result};

pub fn l2_normalize(mut v: ArrayViewMut1<f32>) -> f32 {
    let norm = v.dot(&v).sqrt();

    if norm != 0. {
        v /= norm;
    }

    norm
}

pub fn l2_normalize_array(mut v: ArrayViewMut2<f32>) {
    for embedding in v.outer_iter_mut() {
        l2_normalize(embedding);
    }
}

pub fn read_number(reader: &mut dyn BufRead, delim: u8) -> Result<usize> {
    let field_str = read_string(reader, delim, false)?;
    field_str.trim().parse().map_err(|e| {
        Error::Format(format!(
            "Cannot parse shape component '{}': {}",
            field_str, e
        ))
    })
}

pub fn read_string(reader: &mut dyn BufRead, delim: u8, lossy: bool) -> Result<String> {
    let mut buf = Vec::new();
    reader
        .read_until(delim, &mut buf)
        .map_err(|e| Error::read_error("Cannot read string", e))?;
    if buf.last() == Some(&delim) {
        buf.pop();
    }

    let s = if lossy {
        String::from_utf8_lossy(&buf).into_owned()
    } else {
        String::from_utf8(buf)
            .map_err(|e| Error::Format(format!("Token contains invalid UTF-8: {}", e)))?
    };

    Ok(s)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use approx::AbsDiffEq;
    use ndarray::{array, Array1};

    use super::{l2_normalize, l2_normalize_array, read_number, read_string};

    #[test]
    fn l2_normalize_returns_norm_and_unit_vector() {
        let mut v = array![3f32, 4f32];
        let norm = l2_normalize(v.view_mut());
        assert!(norm.abs_diff_eq(&5f32, 1e-6));
        assert!(v.abs_diff_eq(&array![0.6f32, 0.8f32], 1e-6));
    }

    #[test]
    fn l2_normalize_leaves_zero_vector_alone() {
        let mut v = Array1::<f32>::zeros(3);
        assert_eq!(l2_normalize(v.view_mut()), 0f32);
        assert_eq!(v, Array1::<f32>::zeros(3));
    }

    #[test]
    fn l2_normalize_array_normalizes_rows() {
        let mut m = array![[3f32, 4f32], [0f32, 2f32]];
        l2_normalize_array(m.view_mut());
        assert!(m.abs_diff_eq(&array![[0.6f32, 0.8f32], [0f32, 1f32]], 1e-6));
    }

    #[test]
    fn read_shape_header() {
        let mut cursor = Cursor::new(b"3000000 300\n".to_vec());
        assert_eq!(read_number(&mut cursor, b' ').unwrap(), 3_000_000);
        assert_eq!(read_number(&mut cursor, b'\n').unwrap(), 300);
    }

    #[test]
    fn read_number_rejects_garbage() {
        let mut cursor = Cursor::new(b"many 300\n".to_vec());
        assert!(read_number(&mut cursor, b' ').is_err());
    }

    #[test]
    fn read_string_lossy_replaces_invalid_utf8() {
        let mut cursor = Cursor::new(b"zee\xe8n ".to_vec());
        assert!(read_string(&mut Cursor::new(b"zee\xe8n ".to_vec()), b' ', false).is_err());
        assert_eq!(
            read_string(&mut cursor, b' ', true).unwrap(),
            "zee\u{FFFD}n"
        );
    }
}
