pub use classification::Classification;
pub use data::ClassificationData;
pub use data::Run;
pub use error::TableError;
pub use lexical::EcmaVersion;

mod classification;
mod data;
mod error;
mod lexical;

/// классификатор кодпоинтов по подготовленной таблице отрезков
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a>
{
    /// начала отрезков, включая замыкающую запись
    starts: &'a [u32],
    /// классы отрезков
    classes: &'a [Classification],
}

impl<'a> Classifier<'a>
{
    /// заранее подготовленные данные
    ///
    /// таблица проверяется: отрезки идут строго по возрастанию, замыкающая запись не раньше
    /// последнего отрезка и того же класса
    pub fn from_baked(source: ClassificationData<'a>) -> Result<Self, TableError>
    {
        let ClassificationData { starts, classes } = source;

        if starts.len() != classes.len() {
            return Err(TableError::LengthMismatch {
                starts: starts.len(),
                classes: classes.len(),
            });
        }

        // хотя бы один отрезок и замыкающая запись
        let (&sentinel, runs) = match starts.split_last() {
            Some((sentinel, runs)) if !runs.is_empty() => (sentinel, runs),
            _ => return Err(TableError::Empty),
        };

        for (index, pair) in runs.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(TableError::NotAscending {
                    index: index + 1,
                    previous: pair[0],
                    start: pair[1],
                });
            }
        }

        let last = runs[runs.len() - 1];

        if sentinel < last {
            return Err(TableError::SentinelBeforeLastRun { sentinel, last });
        }

        let sentinel_class = classes[classes.len() - 1];
        let last_class = classes[classes.len() - 2];

        if sentinel_class != last_class {
            return Err(TableError::SentinelClassMismatch {
                sentinel: sentinel_class,
                last: last_class,
            });
        }

        Ok(Self { starts, classes })
    }

    /// класс кодпоинта
    ///
    /// кодпоинты, не попавшие в таблицу (до первого отрезка или после замыкающей записи),
    /// относятся к Other
    #[inline]
    pub fn lookup(&self, code: u32) -> Classification
    {
        self.get(code).unwrap_or(Classification::Other)
    }

    /// класс кодпоинта, если он покрыт таблицей
    ///
    /// кодпоинт, пропущенный в исходных данных, но лежащий внутри таблицы, получает класс
    /// отрезка, в который он попадает
    #[inline]
    pub fn get(&self, code: u32) -> Option<Classification>
    {
        if code < self.first_code() || code > self.last_code() {
            return None;
        }

        // количество отрезков, начинающихся не позже кодпоинта - как минимум один
        let index = self.starts.partition_point(|&start| start <= code);

        self.classes.get(index - 1).copied()
    }

    /// начало первого отрезка
    #[inline]
    pub fn first_code(&self) -> u32
    {
        self.starts[0]
    }

    /// последний кодпоинт, покрытый таблицей (начало замыкающей записи)
    #[inline]
    pub fn last_code(&self) -> u32
    {
        self.starts[self.starts.len() - 1]
    }

    /// количество записей таблицы, включая замыкающую
    #[inline]
    pub fn len(&self) -> usize
    {
        self.starts.len()
    }

    /// таблица, прошедшая проверку, не бывает пустой
    #[inline]
    pub fn is_empty(&self) -> bool
    {
        false
    }

    /// записи таблицы по возрастанию, замыкающая - последней
    pub fn runs(&self) -> impl Iterator<Item = Run> + 'a
    {
        let starts = self.starts;
        let classes = self.classes;

        starts
            .iter()
            .zip(classes.iter())
            .map(|(&start, &class)| Run { start, class })
    }
}
